mod class;
mod payment;
mod reservation;
mod user;
