use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::admin_page::AdminPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/admin")]
    AdminPage {},

}
