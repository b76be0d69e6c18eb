use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Project, PROJECTS};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: u32,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let p = &props.project;
    html! {
        <Reveal class={classes!("project-card")} delay_ms={props.index * 200}>
            <div class="project-image">
                <img src={p.image} alt={p.title} loading="lazy" />
            </div>
            <div class="project-content">
                <h3>{p.title}</h3>
                <p>{p.description}</p>
                <div class="project-links">
                    <a href={p.demo_url} class="project-link">{"Live Demo"}</a>
                    <a href={p.source_url} class="project-link">{"GitHub"}</a>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <div class="section-container">
            <Reveal class={classes!("section-header")}>
                <h2 class="section-title">{"My Projects"}</h2>
                <div class="section-divider"></div>
            </Reveal>

            <Reveal class={classes!("card-grid")} threshold={0.1}>
                {
                    PROJECTS.iter().zip(0u32..).map(|(project, index)| html! {
                        <ProjectCard key={project.id} project={project.clone()} index={index} />
                    }).collect::<Html>()
                }
            </Reveal>
            <style>
                {r#"
                .project-card {
                    background: var(--surface);
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 4px 20px var(--shadow);
                    cursor: pointer;
                }
                .project-card.revealed:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 20px 40px var(--shadow);
                }
                .project-image {
                    position: relative;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .project-card:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-content {
                    padding: 1.5rem;
                }
                .project-content h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .project-content p {
                    color: var(--text-secondary);
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .project-links {
                    display: flex;
                    gap: 1rem;
                }
                .project-link {
                    color: var(--primary);
                    text-decoration: none;
                    font-weight: 500;
                    font-size: 0.9rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid var(--primary);
                    border-radius: 0.25rem;
                    transition: all 0.3s ease;
                }
                .project-link:hover {
                    background: var(--primary);
                    color: white;
                }
                "#}
            </style>
        </div>
    }
}
