pub mod handle;
pub mod mock;
pub mod path_end;
pub mod requests;
pub mod responses;
