pub mod advice;
pub mod config;
pub mod health;
pub mod history;
pub mod napfa;
pub mod output;
pub mod report;
