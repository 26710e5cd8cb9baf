//! Menu data adapters

mod file_repo_impl;

pub use file_repo_impl::FileMenuRepository;
