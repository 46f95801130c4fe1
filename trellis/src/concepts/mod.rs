pub mod identity;
pub mod neighbour;
pub mod route;
