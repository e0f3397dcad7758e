mod activity;
pub use activity::ActivityView;

mod change_password;
pub use change_password::ChangePasswordView;

mod login;
pub use login::LoginView;

mod profile;
pub use profile::ProfileView;

mod register;
pub use register::RegisterView;
