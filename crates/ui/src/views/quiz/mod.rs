mod components;
mod keyboard;
mod view;

pub use view::QuizView;

#[cfg(test)]
pub(crate) use view::QuizTestHandles;
