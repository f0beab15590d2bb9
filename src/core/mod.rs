pub mod add;
pub mod calculator;
pub mod checkin;
pub mod report;
pub mod repository;
pub mod view;
