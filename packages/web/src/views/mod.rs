mod activity;
pub use activity::Activity;

mod change_password;
pub use change_password::ChangePassword;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod register;
pub use register::Register;
