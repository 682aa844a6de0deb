//! Page components, one per route. Each page invokes the navigation guard
//! with its route's meta flags before rendering anything sensitive.

pub mod admin;
pub mod history;
pub mod home;
pub mod login;
pub mod not_found;
pub mod plant;
pub mod search;
pub mod upload;
