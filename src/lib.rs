#![recursion_limit = "512"]

mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use components::auth::AuthForm;
use components::dashboard::Dashboard;
use config::AppConfig;
use models::User;
use services::record_store::RecordStore;
use services::session::{Screen, Session};
use services::storage::{KeyValueStore, LocalStorage, MemoryStorage};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub enum Msg {
    Login(User),
    Logout,
    UpdateUser(User),
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub struct App {
    session: Session,
}

fn open_backend() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("{}, profile data will not outlive this page", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = RecordStore::new(open_backend(), ctx.props().config.keys.clone());
        Self {
            session: Session::restore(store),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Login(user) => self.session.login(user),
            Msg::Logout => self.session.logout(),
            Msg::UpdateUser(user) => self.session.update_user(user),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let store = self.session.store().clone();
        match self.session.screen() {
            Screen::Dashboard(user) => html! {
                <Dashboard
                    user={user.clone()}
                    store={store}
                    missing_record={ctx.props().config.missing_record}
                    on_logout={ctx.link().callback(|_| Msg::Logout)}
                    on_update_user={ctx.link().callback(Msg::UpdateUser)}
                />
            },
            Screen::Auth => html! {
                <AuthForm store={store} on_login={ctx.link().callback(Msg::Login)} />
            },
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<App>();
}
