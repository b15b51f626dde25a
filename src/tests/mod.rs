mod config_tests;
mod document_scrub_tests;
