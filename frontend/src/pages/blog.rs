use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{BlogPost, BLOG_POSTS};

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    post: BlogPost,
    index: u32,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let post = &props.post;
    let read_more = {
        let title = post.title;
        Callback::from(move |_: MouseEvent| {
            // Full posts are not published yet.
            info!("Read more clicked for {}", title);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("Opening blog post: {}", title));
            }
        })
    };

    html! {
        <Reveal tag="article" class={classes!("blog-card")} delay_ms={props.index * 200}>
            <div class="blog-meta">
                <span class="blog-date">{post.date}</span>
                <div class="blog-tags">
                    { for post.tags.iter().map(|tag| html! { <span key={*tag} class="blog-tag">{*tag}</span> }) }
                </div>
            </div>
            <h3>{post.title}</h3>
            <p>{post.excerpt}</p>
            <button class="read-more" onclick={read_more}>{"Read More"}</button>
        </Reveal>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="section-container">
            <Reveal class={classes!("section-header")}>
                <h2 class="section-title">{"Latest Blog Posts"}</h2>
                <div class="section-divider"></div>
            </Reveal>

            <Reveal class={classes!("card-grid")} threshold={0.1}>
                {
                    BLOG_POSTS.iter().zip(0u32..).map(|(post, index)| html! {
                        <BlogCard key={post.id} post={post.clone()} index={index} />
                    }).collect::<Html>()
                }
            </Reveal>
            <style>
                {r#"
                #blog {
                    background: var(--surface);
                }
                .blog-card {
                    background: var(--background);
                    border-radius: 1rem;
                    overflow: hidden;
                    padding: 1.5rem;
                    box-shadow: 0 4px 20px var(--shadow);
                }
                .blog-card.revealed:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 10px 30px var(--shadow);
                }
                .blog-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                    gap: 0.5rem;
                }
                .blog-date {
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                }
                .blog-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .blog-tag {
                    background: var(--border);
                    color: var(--primary);
                    padding: 0.25rem 0.75rem;
                    border-radius: 1rem;
                    font-size: 0.8rem;
                    font-weight: 500;
                }
                .blog-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                    line-height: 1.4;
                }
                .blog-card p {
                    color: var(--text-secondary);
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .read-more {
                    background: var(--primary);
                    color: white;
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 0.25rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .read-more:hover {
                    transform: translateY(-2px) scale(1.05);
                }
                "#}
            </style>
        </div>
    }
}
