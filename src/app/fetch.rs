use eframe::egui;

use super::rt;

/// Messages for cover loading.
pub enum CoverMsg {
    Ok {
        event_id: u64,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        event_id: u64,
    },
}

/// Fetches an image over HTTP and decodes it to raw RGBA off the UI thread.
async fn fetch_image(url: &str) -> Result<(usize, usize, Vec<u8>), String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("request error: {e}"))?;
    let bytes = resp.bytes().await.map_err(|e| format!("body error: {e}"))?;

    tokio::task::spawn_blocking(move || -> Result<(usize, usize, Vec<u8>), String> {
        let img = image::load_from_memory(&bytes).map_err(|e| format!("decode error: {e}"))?;
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Ok((w as usize, h as usize, rgba.into_vec()))
    })
    .await
    .map_err(|e| format!("decode task join failed: {e}"))?
}

impl super::EventDeckApp {
    /// Schedule background cover downloads for every catalog entry that still
    /// needs one (idempotent; each URL is fetched once).
    pub(super) fn schedule_cover_downloads(&mut self, ctx: &egui::Context) {
        let targets: Vec<(u64, String)> = self
            .events
            .iter()
            .filter(|item| {
                !item.image_url.is_empty()
                    && !self.covers.contains_key(&item.id)
                    && !self.covers_loading.contains(&item.id)
            })
            .map(|item| (item.id, item.image_url.clone()))
            .collect();

        for (id, url) in targets {
            self.covers_loading.insert(id);
            let tx = self.cover_tx.clone();
            let ctx2 = ctx.clone();
            rt().spawn(async move {
                let msg = match fetch_image(&url).await {
                    Ok((w, h, rgba)) => {
                        log::info!("cover ok: id={} size={}x{} url={}", id, w, h, url);
                        CoverMsg::Ok {
                            event_id: id,
                            w,
                            h,
                            rgba,
                        }
                    }
                    Err(err) => {
                        log::warn!("cover fetch failed: id={} err={} url={}", id, err, url);
                        CoverMsg::Err { event_id: id }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming cover messages and upload textures.
    pub(super) fn poll_covers(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.cover_rx.try_recv() {
            match msg {
                CoverMsg::Ok {
                    event_id,
                    w,
                    h,
                    rgba,
                } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("cover_{event_id}"),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.covers.insert(event_id, tex);
                    self.covers_loading.remove(&event_id);
                }
                CoverMsg::Err { event_id } => {
                    // Placeholder fill stays; nothing to retry automatically.
                    self.covers_loading.remove(&event_id);
                }
            }
        }
    }
}
