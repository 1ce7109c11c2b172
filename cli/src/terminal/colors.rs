use colored::Color;

pub const HEADER: Color = Color::BrightGreen;
