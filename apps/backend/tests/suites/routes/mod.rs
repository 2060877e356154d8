mod accounts;
mod auth;
