pub mod cars;
pub mod contact;
pub mod home;
pub mod not_found;

pub use cars::CarsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
