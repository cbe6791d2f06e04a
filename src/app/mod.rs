pub mod visitor_repository;
