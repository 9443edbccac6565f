pub use super::feedback::Entity as Feedback;
