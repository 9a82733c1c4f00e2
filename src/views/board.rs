use leptos::prelude::*;

use super::document::AppAppBar;
use super::landing::Pricing;
use super::PageContext;
use crate::models::{BoardColumn, Task};

#[component]
pub fn ProjectManagementPage(ctx: PageContext, columns: Vec<BoardColumn>) -> impl IntoView {
    view! {
        <AppAppBar ctx=ctx.clone() />
        <main>
            <ProjectHome ctx=ctx />
            <TaskBoard columns=columns />
            <hr class="divider" />
            <Pricing />
        </main>
    }
}

#[component]
fn ProjectHome(ctx: PageContext) -> impl IntoView {
    let (user, workspace) = match &ctx.session {
        Some(session) => (session.user_id.clone(), session.workspace().to_string()),
        None => (String::new(), String::new()),
    };

    view! {
        <section id="project-home" class="project-header container">
            <h1 class="t-h3">"Project management"</h1>
            <p class="muted">
                "Signed in as " <strong data-user=user.clone()>{user.clone()}</strong>
                " · workspace " <code>{workspace}</code>
            </p>
        </section>
    }
}

/// One column per task status, in board order.
#[component]
fn TaskBoard(columns: Vec<BoardColumn>) -> impl IntoView {
    view! {
        <section id="dashboard" class="container section">
            <div class="board">
                {columns.into_iter().map(|column| {
                    let count = column.tasks.len();
                    let cards = if column.tasks.is_empty() {
                        view! { <p class="empty">"No tasks"</p> }.into_any()
                    } else {
                        column.tasks.into_iter().map(|task| view! { <TaskCard task=task /> })
                            .collect::<Vec<_>>()
                            .into_any()
                    };
                    view! {
                        <div class="board-column" data-status=column.status.as_str()>
                            <h3>
                                <span>{column.status.label()}</span>
                                <span class="muted">{count}</span>
                            </h3>
                            {cards}
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    view! {
        <article class="card task-card" data-task-id=task.id.to_string()>
            <strong>{task.title}</strong>
            {task.description.map(|d| view! { <p class="muted">{d}</p> })}
        </article>
    }
}
