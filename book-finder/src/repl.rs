use crate::view::render::{render, CoverUrls};
use crate::view::state::SearchView;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// One search for `words` joined by spaces, rendered once it resolves.
pub async fn run_once<W>(
    view: SearchView,
    covers: &CoverUrls,
    words: &[String],
    mut output: W,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    view.set_query(words.join(" "));
    view.run_search().await;

    let text = render(&view.snapshot(), covers).to_text();
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// Line-oriented terminal front end.
///
/// Every line read from `input` becomes the query text and starts a
/// search without waiting for earlier ones. The page is re-rendered to
/// `output` on every state change. Returns once input is exhausted and
/// every started search has resolved.
pub async fn run_interactive<R, W>(
    view: SearchView,
    covers: CoverUrls,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let mut rx = view.subscribe();
    let text = render(&rx.borrow_and_update(), &covers).to_text();
    output.write_all(format!("{}\n", text).as_bytes()).await?;
    output.flush().await?;

    let renderer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let text = render(&rx.borrow_and_update(), &covers).to_text();
            let written = async {
                output.write_all(format!("{}\n", text).as_bytes()).await?;
                output.flush().await
            };
            if let Err(e) = written.await {
                error!("Failed to write page: {}", e);
                break;
            }
        }
    });

    let view = Arc::new(view);
    let mut searches: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        view.set_query(line);
        if let Some(search) = Arc::clone(&view).start_search() {
            searches.push(tokio::spawn(search));
        }
    }

    debug!("Input closed, waiting for {} searches", searches.len());
    for search in searches {
        if let Err(e) = search.await {
            error!("Search task failed: {}", e);
        }
    }

    // Dropping the last handle closes the channel and ends the renderer.
    drop(view);
    if let Err(e) = renderer.await {
        error!("Renderer task failed: {}", e);
    }

    Ok(())
}
