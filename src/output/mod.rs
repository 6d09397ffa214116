pub mod formatter;

pub use formatter::{
    format_bmi_summary, format_exercise_list, format_goal_list, format_grade_table,
    format_minutes, format_schedule, format_sleep_summary, should_use_colors,
};
