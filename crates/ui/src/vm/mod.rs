mod quiz_summary_vm;
mod quiz_vm;
mod time_fmt;

pub use quiz_summary_vm::{QuizSummaryVm, ReviewRowVm, map_quiz_summary};
pub use quiz_vm::{
    FeedbackVm, OptionRowVm, QuestionScreenVm, QuizIntent, QuizScreen, QuizVm, start_quiz,
};
pub use time_fmt::format_clock;
