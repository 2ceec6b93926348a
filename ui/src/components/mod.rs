pub mod badges;
pub mod confirmation_modal;
pub mod error_alert;
pub mod form_input;
pub mod layout;
pub mod modal;
pub mod package_card;
pub mod package_filter;
pub mod phone_line_selector;
pub mod price_display;
pub mod require_auth;
pub mod transaction_row;

pub use badges::{CategoryBadge, PhoneLineStatusBadge, TransactionStatusBadge};
pub use confirmation_modal::ConfirmationModal;
pub use error_alert::ErrorAlert;
pub use form_input::FormInput;
pub use modal::Modal;
pub use package_card::PackageCard;
pub use package_filter::PackageFilterBar;
pub use phone_line_selector::PhoneLineSelector;
pub use price_display::PriceDisplay;
pub use require_auth::RequireAuth;
pub use transaction_row::TransactionRow;
