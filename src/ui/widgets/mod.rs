// src/ui/widgets/mod.rs

// Declare all of our widget modules here.
pub mod footer;       // The dynamic key-help bar.
pub mod input;        // The text box and the "Check Originality" action.
pub mod notice_popup; // Validation and failure notices.
pub mod report;       // The results tab.
pub mod sidebar;      // Upload placeholder and "How it works".
pub mod summary;      // The score grid at the top of the report.
pub mod tabs;         // The tab bar.
