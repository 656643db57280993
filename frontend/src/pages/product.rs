use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::{categories, filter_products, load_catalog, CategoryFilter, Product, ProductIcon};
use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{HeaderAction, Page};
use crate::motion::hooks::use_scroll_to_top;

fn icon_for(icon: ProductIcon) -> IconKind {
    match icon {
        ProductIcon::BrainCircuit => IconKind::BrainCircuit,
        ProductIcon::BarChart => IconKind::BarChart,
        ProductIcon::Wrench => IconKind::Wrench,
    }
}

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
    on_select: Callback<Product>,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let onclick = {
        let product = props.product.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(product.clone()))
    };

    html! {
        <div class="card product-card" onclick={onclick}>
            <div class="icon-tile">
                <Icon kind={icon_for(props.product.icon)} size={32} />
            </div>
            <span class="product-category">{props.product.category.clone()}</span>
            <h3>{props.product.name.clone()}</h3>
            <p class="muted">{props.product.description.clone()}</p>
            <span class="product-more">
                {"Learn more"}
                <Icon kind={IconKind::ChevronRight} size={16} />
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductModalProps {
    product: Product,
    on_close: Callback<()>,
}

/// Detail overlay; clicking the backdrop or the close button dismisses it.
#[function_component(ProductModal)]
fn product_modal(props: &ProductModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let product = &props.product;

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal card" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close}>
                    <Icon kind={IconKind::X} size={24} />
                </button>
                <div class="modal-heading">
                    <div class="icon-tile">
                        <Icon kind={icon_for(product.icon)} size={40} />
                    </div>
                    <div>
                        <h2>{product.name.clone()}</h2>
                        <span class="product-category">{product.category.clone()}</span>
                    </div>
                </div>
                <h3>{"How It Works"}</h3>
                <p class="muted">{product.how_it_works.clone()}</p>
                <h3>{"Key Advantages"}</h3>
                <ul class="check-list">
                    { for product.advantages.iter().map(|advantage| html! {
                        <li>
                            <Icon kind={IconKind::CheckCircle} size={20} class="accent" />
                            <span>{advantage.clone()}</span>
                        </li>
                    }) }
                </ul>
                <a href={product.href()} class="btn btn-primary btn-large modal-cta">
                    <span class="btn-inner">
                        {format!("Go to {}", product.name)}
                        <Icon kind={IconKind::ArrowRight} />
                    </span>
                </a>
            </div>
        </div>
    }
}

#[function_component(ProductHub)]
pub fn product_hub() -> Html {
    use_scroll_to_top();
    let products = use_state(load_catalog);
    let query = use_state(String::new);
    let filter = use_state(|| CategoryFilter::All);
    let selected = use_state(|| None::<Product>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |product: Product| selected.set(Some(product)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let chips = categories(&products)
        .into_iter()
        .map(|category| {
            let active = *filter == category;
            let label = category.label().to_string();
            let onclick = {
                let filter = filter.clone();
                Callback::from(move |_: MouseEvent| filter.set(category.clone()))
            };
            html! {
                <button class={classes!("chip", active.then(|| "active"))} onclick={onclick}>
                    {label}
                </button>
            }
        })
        .collect::<Html>();

    let visible = filter_products(&products, &query, &filter);

    html! {
        <Page action={HeaderAction::StartTrial}>
            <section class="hero">
                <div class="container narrow">
                    <h1 class="gradient-text">{"Explore Our Products"}</h1>
                    <p class="hero-subtitle">
                        {"AI-powered tools built to help you learn faster, track your growth and create better study material."}
                    </p>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="catalog-controls">
                        <label class="search-box">
                            <Icon kind={IconKind::Search} size={20} class="muted" />
                            <input
                                type="text"
                                placeholder="Search products..."
                                value={(*query).clone()}
                                oninput={on_search}
                            />
                        </label>
                        <div class="chip-row">{chips}</div>
                    </div>

                    if visible.is_empty() {
                        <p class="muted center empty-catalog">
                            {"No products found. Try adjusting your search or filter."}
                        </p>
                    } else {
                        <div class="grid-3">
                            { for visible.into_iter().map(|product| html! {
                                <ProductCard key={product.id} product={product.clone()} on_select={on_select.clone()} />
                            }) }
                        </div>
                    }
                </div>
            </section>

            if let Some(product) = (*selected).clone() {
                <ProductModal product={product} on_close={on_close} />
            }
        </Page>
    }
}
