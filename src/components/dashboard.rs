use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::MissingRecordPolicy;
use crate::models::{Gender, User};
use crate::services::editor::{Field, ProfileEditor};
use crate::services::record_store::RecordStore;

pub enum Msg {
    Edit,
    Input(Field, String),
    Save,
    Cancel,
    Logout,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user: User,
    pub store: RecordStore,
    #[prop_or_default]
    pub missing_record: MissingRecordPolicy,
    pub on_logout: Callback<()>,
    pub on_update_user: Callback<User>,
}

pub struct Dashboard {
    editor: ProfileEditor,
    gender_select: NodeRef,
}

impl Dashboard {
    fn field_class(&self) -> &'static str {
        if self.editor.is_editing() {
            "w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 bg-white"
        } else {
            "w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 bg-gray-100 cursor-not-allowed"
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        id: &'static str,
        kind: &'static str,
        field: Field,
        value: &str,
    ) -> Html {
        html! {
            <input
                id={id}
                type={kind}
                value={value.to_string()}
                disabled={!self.editor.is_editing()}
                class={self.field_class()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    Msg::Input(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        }
    }

    fn actions(&self, ctx: &Context<Self>) -> Html {
        if self.editor.is_editing() {
            html! {
                <>
                    <button type="submit" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors">
                        {"Save Changes"}
                    </button>
                    <button
                        type="button"
                        onclick={ctx.link().callback(|_| Msg::Cancel)}
                        class="px-4 py-2 border border-gray-300 hover:bg-gray-100 text-gray-900 rounded-lg font-medium transition-colors"
                    >
                        {"Cancel"}
                    </button>
                </>
            }
        } else {
            html! {
                <button
                    type="button"
                    onclick={ctx.link().callback(|_| Msg::Edit)}
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    {"Edit Profile"}
                </button>
            }
        }
    }
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            editor: ProfileEditor::new(&ctx.props().user),
            gender_select: NodeRef::default(),
        }
    }

    // The `selected` attribute stops applying once the user has picked an
    // option, so the live value is pushed after every render.
    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.gender_select.cast::<HtmlSelectElement>() {
            select.set_value(self.editor.form().gender.as_str());
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        self.editor.sync(&ctx.props().user);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Edit => {
                self.editor.enter_edit();
                true
            }
            Msg::Input(field, value) => self.editor.set_field(field, value),
            Msg::Save => {
                match self.editor.save(&props.user, &props.store, props.missing_record) {
                    Ok(Some(user)) => props.on_update_user.emit(user),
                    Ok(None) => return false,
                    // Stay in edit mode so the changes are not lost.
                    Err(e) => log::error!("failed to save profile: {}", e),
                }
                true
            }
            Msg::Cancel => {
                self.editor.cancel(&props.user);
                true
            }
            Msg::Logout => {
                props.on_logout.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &ctx.props().user;
        let form = self.editor.form();
        let editing = self.editor.is_editing();
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Save
        });
        let onchange_gender = ctx.link().callback(|e: Event| {
            Msg::Input(Field::Gender, e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <div class="min-h-screen bg-gray-50">
                // Header
                <header class="border-b border-gray-200 bg-white">
                    <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                        <div>
                            <h1 class="text-xl font-bold text-gray-900">{"MyLogn"}</h1>
                            <p class="text-sm text-gray-600">{"Profile Management"}</p>
                        </div>
                        <button
                            onclick={ctx.link().callback(|_| Msg::Logout)}
                            class="px-4 py-2 border border-gray-300 hover:bg-gray-100 text-gray-900 rounded-lg font-medium transition-colors"
                        >
                            {"Log Out"}
                        </button>
                    </div>
                </header>

                <main class="container mx-auto px-4 py-8">
                    <div class="max-w-2xl mx-auto bg-white rounded-lg shadow-sm border border-gray-200">
                        <div class="p-6 border-b border-gray-200">
                            <h2 class="text-lg font-semibold text-gray-900">{"Your Profile"}</h2>
                            <p class="text-sm text-gray-600">
                                {"Manage your personal information and account details"}
                            </p>
                        </div>
                        <div class="p-6 space-y-6">
                            // Email is the record key and cannot be edited
                            <div class="space-y-2">
                                <label for="email" class="text-sm font-medium text-gray-900">{"Email Address"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    value={user.email.clone()}
                                    disabled={true}
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 bg-gray-100"
                                />
                                <p class="text-xs text-gray-600">{"Email address cannot be changed"}</p>
                            </div>

                            <hr class="border-gray-200"/>

                            <form onsubmit={onsubmit} class="space-y-4">
                                <div class="space-y-2">
                                    <label for="name" class="text-sm font-medium text-gray-900">{"Full Name"}</label>
                                    { self.text_input(ctx, "name", "text", Field::Name, &form.name) }
                                </div>

                                <div class="space-y-2">
                                    <label for="phone" class="text-sm font-medium text-gray-900">{"Phone Number"}</label>
                                    { self.text_input(ctx, "phone", "tel", Field::Phone, &form.phone) }
                                </div>

                                <div class="space-y-2">
                                    <label for="gender" class="text-sm font-medium text-gray-900">{"Gender"}</label>
                                    <select
                                        ref={self.gender_select.clone()}
                                        id="gender"
                                        disabled={!editing}
                                        onchange={onchange_gender}
                                        class={self.field_class()}
                                    >
                                        {
                                            Gender::ALL.iter().map(|g| html! {
                                                <option value={g.as_str()} selected={*g == form.gender}>
                                                    {g.label()}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>

                                <div class="flex gap-3 pt-4">
                                    { self.actions(ctx) }
                                </div>
                            </form>
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}
