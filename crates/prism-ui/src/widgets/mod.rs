pub mod gradient_text;
pub mod row;
