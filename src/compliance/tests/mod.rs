mod common;
mod requirement;
