pub mod footer;
pub mod header;
pub mod history;
pub mod modals;
pub mod result_view;
pub mod toast;
