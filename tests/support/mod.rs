#![allow(dead_code)]

pub mod mock_site;
pub mod socket_guard;
