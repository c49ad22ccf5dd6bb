use super::super::Model;
use super::super::Msg;
use shared::Theme;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(theme: Theme, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ theme.toggle_title() }
        >
            <i id="theme-icon" class={ theme.icon() }></i>
        </button>
    }
}
