//! HTTP handlers for the users API and the HTML listing page.

pub mod pages;
pub mod users;
