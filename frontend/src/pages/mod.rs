pub mod catalog;
pub mod documents;
pub mod glossary;
pub mod not_found;
pub mod shop;
pub mod tatvapada;
pub mod tatvapadakara;
pub mod users;
