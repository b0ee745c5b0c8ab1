use yew::prelude::*;

use crate::content::Icon;

pub fn icon_slot(icon: Icon) -> Html {
    html! {
        <i class={classes!("card-icon", icon.css_class())} aria-hidden="true">
            {icon.glyph()}
        </i>
    }
}
