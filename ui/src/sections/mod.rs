mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod contributions;
pub use contributions::Contributions;

mod leadership;
pub use leadership::Leadership;

mod gallery;
pub use gallery::Gallery;

mod contact;
pub use contact::Contact;
