mod apply;
mod config;
mod tokens;
