pub mod formatter;

pub use formatter::{
    format_award, format_eligible_list, format_rankings_table, format_rankings_tsv,
    should_use_colors,
};
