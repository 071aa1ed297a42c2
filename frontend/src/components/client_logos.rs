use yew::prelude::*;

pub const PARTNERS: [(&str, &str); 4] = [
    ("/assets/partner-era.svg", "ERA Real Estate"),
    ("/assets/partner-dental.svg", "Da Vinci Dental Clinic"),
    ("/assets/partner-tonerland.svg", "Tonerland"),
    ("/assets/partner-4.svg", "Partner Logo"),
];

#[function_component(ClientLogos)]
pub fn client_logos() -> Html {
    html! {
        <div class="client-logos">
            { for PARTNERS.iter().map(|(src, alt)| html! {
                <div class="client-logo">
                    <img src={*src} alt={*alt} loading="lazy" />
                </div>
            }) }
        </div>
    }
}
