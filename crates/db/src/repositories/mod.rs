pub mod brief_repo;

pub use brief_repo::BriefRepo;
