//! Repositories for the three collections the backend operates on

pub mod appointment_option;
pub mod appointment_option_sql;
pub mod booking;
pub mod booking_sql;
pub mod memory;
pub mod user;
pub mod user_sql;

pub use appointment_option::{AppointmentOption, AppointmentOptionRepository};
pub use appointment_option_sql::SqlAppointmentOptionRepository;
pub use booking::{Booking, BookingRepository};
pub use booking_sql::SqlBookingRepository;
pub use memory::{MemoryAppointmentOptionRepository, MemoryBookingRepository, MemoryUserRepository};
pub use user::{Role, User, UserRepository};
pub use user_sql::SqlUserRepository;
