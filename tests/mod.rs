mod common;

mod account_decoder_tests;
mod client_tests;
mod report_tests;
