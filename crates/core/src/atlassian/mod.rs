/// Atlassian-related transformations
///
/// This module contains pure transformation functions for Atlassian products.
/// All functions are free of I/O operations and testable with fixture data.
pub mod jira;
