use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Gender, User};
use crate::services::auth::{authenticate, AuthMode, Credentials};
use crate::services::record_store::RecordStore;

#[derive(Clone, Copy)]
pub enum Input {
    Email,
    Name,
    Phone,
}

pub enum Msg {
    SwitchMode(AuthMode),
    Input(Input, String),
    SelectGender(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: RecordStore,
    pub on_login: Callback<User>,
}

pub struct AuthForm {
    mode: AuthMode,
    credentials: Credentials,
    error: Option<String>,
    gender_select: NodeRef,
}

impl AuthForm {
    fn tab(&self, ctx: &Context<Self>, mode: AuthMode, label: &'static str) -> Html {
        let class = if self.mode == mode {
            "flex-1 py-2 text-sm font-medium border-b-2 border-blue-600 text-blue-600"
        } else {
            "flex-1 py-2 text-sm font-medium border-b-2 border-transparent text-gray-600 hover:text-gray-900"
        };
        html! {
            <button type="button" class={class} onclick={ctx.link().callback(move |_| Msg::SwitchMode(mode))}>
                {label}
            </button>
        }
    }

    fn input(
        &self,
        ctx: &Context<Self>,
        input: Input,
        label: &'static str,
        kind: &'static str,
        value: &str,
    ) -> Html {
        html! {
            <div class="space-y-2">
                <label class="text-sm font-medium text-gray-900">{label}</label>
                <input
                    type={kind}
                    value={value.to_string()}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        Msg::Input(input, e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
        }
    }

    fn registration_fields(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            Msg::SelectGender(e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <>
                { self.input(ctx, Input::Name, "Full Name", "text", &self.credentials.name) }
                { self.input(ctx, Input::Phone, "Phone Number", "tel", &self.credentials.phone) }
                <div class="space-y-2">
                    <label class="text-sm font-medium text-gray-900">{"Gender"}</label>
                    <select
                        ref={self.gender_select.clone()}
                        onchange={onchange}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 bg-white"
                    >
                        <option value="" selected={self.credentials.gender.is_none()} disabled={true}>
                            {"Select gender"}
                        </option>
                        {
                            Gender::ALL.iter().map(|g| html! {
                                <option value={g.as_str()} selected={self.credentials.gender == Some(*g)}>
                                    {g.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </>
        }
    }
}

impl Component for AuthForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: AuthMode::SignIn,
            credentials: Credentials::default(),
            error: None,
            gender_select: NodeRef::default(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.gender_select.cast::<HtmlSelectElement>() {
            select.set_value(self.credentials.gender.map_or("", |g| g.as_str()));
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchMode(mode) => {
                self.mode = mode;
                self.error = None;
                true
            }
            Msg::Input(input, value) => {
                match input {
                    Input::Email => self.credentials.email = value,
                    Input::Name => self.credentials.name = value,
                    Input::Phone => self.credentials.phone = value,
                }
                true
            }
            Msg::SelectGender(value) => {
                self.credentials.gender = value.parse().ok();
                true
            }
            Msg::Submit => {
                match authenticate(&ctx.props().store, self.mode, &self.credentials) {
                    Ok(user) => {
                        self.error = None;
                        ctx.props().on_login.emit(user);
                    }
                    Err(e) => {
                        log::debug!("auth rejected: {}", e);
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let (title, submit_label) = match self.mode {
            AuthMode::SignIn => ("Welcome back", "Sign In"),
            AuthMode::Register => ("Create your account", "Create Account"),
        };

        html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
                <div class="w-full max-w-md bg-white rounded-lg shadow-sm border border-gray-200">
                    <div class="p-6 text-center border-b border-gray-200">
                        <h1 class="text-2xl font-bold text-gray-900">{"MyLogn"}</h1>
                        <p class="text-sm text-gray-600">{title}</p>
                    </div>

                    <div class="flex">
                        { self.tab(ctx, AuthMode::SignIn, "Sign In") }
                        { self.tab(ctx, AuthMode::Register, "Create Account") }
                    </div>

                    <form onsubmit={onsubmit} class="p-6 space-y-4">
                        { self.input(ctx, Input::Email, "Email Address", "email", &self.credentials.email) }
                        if self.mode == AuthMode::Register {
                            { self.registration_fields(ctx) }
                        }
                        {
                            self.error.as_ref().map(|error| html! {
                                <p class="text-sm text-red-600">{error.clone()}</p>
                            }).unwrap_or_else(|| html! {})
                        }
                        <button
                            type="submit"
                            class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                        >
                            {submit_label}
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
