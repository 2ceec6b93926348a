pub mod account;
pub mod catalog;
pub mod checkout;
pub mod confirmation;
pub mod login;
pub mod not_found;
pub mod package_detail;
pub mod transaction_history;

pub use account::AccountPage;
pub use catalog::CatalogPage;
pub use checkout::CheckoutPage;
pub use confirmation::ConfirmationPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use package_detail::PackageDetailPage;
pub use transaction_history::TransactionHistoryPage;
