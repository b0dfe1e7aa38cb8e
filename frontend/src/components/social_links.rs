use yew::prelude::*;

const LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "GH", "https://github.com"),
    ("LinkedIn", "IN", "https://linkedin.com"),
    ("Instagram", "IG", "https://www.instagram.com/md_umor_420/"),
];

#[function_component(SocialLinks)]
pub fn social_links() -> Html {
    html! {
        <div class="social-links">
            { for LINKS.iter().map(|(label, short, href)| html! {
                <a
                    href={*href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label={*label}
                >
                    {*short}
                </a>
            }) }
        </div>
    }
}
