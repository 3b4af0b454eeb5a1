pub mod forgot_password;
pub mod signin;
pub mod signup;

pub use forgot_password::ForgotPasswordPage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
