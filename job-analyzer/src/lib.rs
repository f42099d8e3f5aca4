pub mod statistics;
pub mod table;

pub use statistics::{calculate_statistics, LanguageStatistics, StatisticsTable};
pub use table::{print_statistics_table, render_table};

/// Languages searched when none are given
pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "Python",
    "Java",
    "JavaScript",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
];
