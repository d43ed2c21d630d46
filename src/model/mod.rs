pub mod image;
pub mod storyboard;
