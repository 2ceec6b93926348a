//! One module per resource collection. Each maps a domain verb onto a fixed
//! method and path of the resource API and forwards the body untouched.

mod customer;
mod package;
mod phone_line;
mod transaction;
