mod alert;
mod button;
mod spinner;

pub use alert::Alert;
pub use button::Button;
pub use spinner::Spinner;
