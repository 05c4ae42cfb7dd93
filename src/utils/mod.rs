pub mod auth_utils;
