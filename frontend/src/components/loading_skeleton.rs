use yew::prelude::*;

fn bar(class: &'static str) -> Html {
    html! { <div class={classes!("skeleton", class)}></div> }
}

/// Placeholder shown while a search is resolving, shaped like the result panel
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div class="loading-skeleton">
            <div class="skeleton-group">
                {bar("w-3-4 h-8")}
                {bar("w-1-2")}
                {bar("w-2-3")}
            </div>
            <div class="skeleton-group bordered">
                {bar("w-1-4 h-6")}
                {for (0..3).map(|_| html! {
                    <div class="skeleton-card">
                        {bar("w-1-3")}
                        {bar("w-1-4")}
                    </div>
                })}
            </div>
            <div class="skeleton-group bordered">
                {bar("w-1-4 h-6")}
                {for (0..4).map(|_| html! {
                    <div class="skeleton-badge">
                        {bar("w-1-4")}
                        {bar("w-1-2 rounded")}
                    </div>
                })}
            </div>
            <div class="skeleton-group bordered">
                {for (0..5).map(|_| html! {
                    <div class="skeleton-row">
                        {bar("w-1-4")}
                        {bar("w-1-6")}
                    </div>
                })}
            </div>
        </div>
    }
}
