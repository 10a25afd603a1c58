use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{Catalog, ResolvedMetric, ValueKind};
use crate::color;
use crate::data::{Dataset, FetchSource, Loader, RegionCollection};
use crate::error::AtlasError;
use crate::extract::{extract, format_value};

use super::auxiliary_controls_visible;
use super::overlay::{LegendModel, RegionOverlay, RegionRender};
use super::style::RegionStyle;
use super::surface::RenderSurface;

/// Coordinator lifecycle. Reselection moves Rendered back to Loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
}

/// A pending render transaction. Each carries the epoch it was issued
/// under; results from superseded epochs are discarded on apply.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    epoch: u64,
    metric: ResolvedMetric,
    year: Option<u16>,
}

impl LoadRequest {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn metric(&self) -> &ResolvedMetric {
        &self.metric
    }

    pub fn dataset_ref(&self) -> &'static str {
        self.metric.dataset_ref
    }
}

/// Outcome of applying a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The results were current and are now on the surface.
    Rendered,
    /// A newer selection superseded this load; results discarded.
    Stale,
}

#[derive(Debug, Clone)]
struct Selection {
    metric: ResolvedMetric,
    year: Option<u16>,
}

/// Owns the active selection and keeps the surface's overlay, legend,
/// and year control consistent with it. At most one overlay and one
/// legend are attached at any time, and at most one in-flight render
/// transaction can win.
#[derive(Debug)]
pub struct Coordinator<S> {
    catalog: Catalog,
    loader: Loader<S>,
    phase: Phase,
    epoch: u64,
    selection: Option<Selection>,
    // Dataset from the last successful render, for year recoloring.
    resident: Option<(&'static str, Arc<Dataset>)>,
    overlay_attached: bool,
    legend_attached: bool,
}

impl<S: FetchSource> Coordinator<S> {
    pub fn new(catalog: Catalog, loader: Loader<S>) -> Self {
        Self {
            catalog,
            loader,
            phase: Phase::Idle,
            epoch: 0,
            selection: None,
            resident: None,
            overlay_attached: false,
            legend_attached: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Id of the active subcategory, once something has rendered.
    pub fn active_subcategory(&self) -> Option<&'static str> {
        self.selection.as_ref().map(|s| s.metric.id)
    }

    /// Year applied to the active selection (density only).
    pub fn active_year(&self) -> Option<u16> {
        self.selection.as_ref().and_then(|s| s.year)
    }

    /// Render the startup default (total population).
    pub fn start<R: RenderSurface>(&mut self, surface: &mut R) -> Result<(), AtlasError> {
        let id = self.catalog.default_subcategory();
        self.select(surface, id)
    }

    /// Begin a render transaction: resolve the subcategory and supersede
    /// any in-flight load. An unresolvable id leaves all state untouched.
    pub fn begin_select(
        &mut self,
        id: &str,
        year: Option<u16>,
    ) -> Result<LoadRequest, AtlasError> {
        let metric = self.catalog.resolve(id)?;
        self.epoch += 1;
        self.phase = Phase::Loading;
        debug!(metric = metric.id, epoch = self.epoch, "selection began");
        Ok(LoadRequest {
            epoch: self.epoch,
            metric,
            year,
        })
    }

    /// Fetch the inputs for a pending transaction. Geometry is cached
    /// across selections; the dataset is fetched per request.
    pub fn load(
        &mut self,
        request: &LoadRequest,
    ) -> Result<(Arc<RegionCollection>, Dataset), AtlasError> {
        let geometry = self.loader.load_geometry()?;
        let dataset = self.loader.load_dataset(request.metric.dataset_ref)?;
        Ok((geometry, dataset))
    }

    /// Apply a completed load. Stale results are discarded; failures
    /// surface a message and keep the last good render on screen.
    pub fn apply<R: RenderSurface>(
        &mut self,
        surface: &mut R,
        request: &LoadRequest,
        outcome: Result<(Arc<RegionCollection>, Dataset), AtlasError>,
    ) -> Result<Applied, AtlasError> {
        if request.epoch != self.epoch {
            debug!(
                epoch = request.epoch,
                current = self.epoch,
                "discarding stale load result"
            );
            return Ok(Applied::Stale);
        }
        match outcome {
            Ok((geometry, dataset)) => {
                self.render(surface, request, geometry, Arc::new(dataset));
                Ok(Applied::Rendered)
            }
            Err(err) => {
                warn!(metric = request.metric.id, error = %err, "render transaction failed");
                surface.show_message(&format!(
                    "Could not load {}: {err}",
                    request.metric.label
                ));
                // The previous render stays on screen untouched.
                self.phase = if self.overlay_attached {
                    Phase::Rendered
                } else {
                    Phase::Idle
                };
                Err(err)
            }
        }
    }

    /// Full selection pipeline: resolve, load, apply. Carries the
    /// current year across so switching back to density keeps it.
    pub fn select<R: RenderSurface>(
        &mut self,
        surface: &mut R,
        id: &str,
    ) -> Result<(), AtlasError> {
        let year = self.active_year();
        let request = self.begin_select(id, year)?;
        let outcome = self.load(&request);
        self.apply(surface, &request, outcome).map(|_| ())
    }

    /// Change the active year. Recolors from the resident dataset when
    /// it is still current, otherwise reruns the full pipeline; both
    /// paths produce identical output since density values are
    /// year-indexed within the same record.
    pub fn set_year<R: RenderSurface>(
        &mut self,
        surface: &mut R,
        year: u16,
    ) -> Result<(), AtlasError> {
        let Some(selection) = self.selection.clone() else {
            warn!(year, "year change ignored: nothing selected");
            return Ok(());
        };
        if selection.metric.kind != ValueKind::Density {
            warn!(
                year,
                metric = selection.metric.id,
                "year change ignored: active metric is not year-indexed"
            );
            return Ok(());
        }

        if let (Some(geometry), Some((dataset_ref, dataset))) =
            (self.loader.cached_geometry(), self.resident.clone())
        {
            if dataset_ref == selection.metric.dataset_ref && self.phase == Phase::Rendered {
                // Supersedes any in-flight load, same as a reselection.
                self.epoch += 1;
                let request = LoadRequest {
                    epoch: self.epoch,
                    metric: selection.metric,
                    year: Some(year),
                };
                self.render(surface, &request, geometry, dataset);
                return Ok(());
            }
        }

        let request = self.begin_select(selection.metric.id, Some(year))?;
        let outcome = self.load(&request);
        self.apply(surface, &request, outcome).map(|_| ())
    }

    fn render<R: RenderSurface>(
        &mut self,
        surface: &mut R,
        request: &LoadRequest,
        geometry: Arc<RegionCollection>,
        dataset: Arc<Dataset>,
    ) {
        let metric = &request.metric;
        let years = dataset.years();
        let year = match metric.kind {
            // Fall back to the latest surveyed year when none is chosen
            // or the chosen one is absent from the dataset.
            ValueKind::Density => request
                .year
                .filter(|y| years.contains(y))
                .or_else(|| years.last().copied()),
            _ => None,
        };

        // Teardown before attach: never two overlays or legends at once.
        if self.overlay_attached {
            surface.detach_overlay();
            self.overlay_attached = false;
        }
        if self.legend_attached {
            surface.detach_legend();
            self.legend_attached = false;
        }

        let mut regions = Vec::with_capacity(geometry.len());
        for feature in geometry.features() {
            let value = extract(dataset.get(&feature.name), metric.kind, metric.field, year);
            let style = RegionStyle::choropleth(color::color_for(value, metric.kind));
            let tooltip = tooltip_text(&feature.name, metric, value, year);
            regions.push(RegionRender {
                name: feature.name.clone(),
                geometry: feature.geometry.clone(),
                style,
                tooltip,
                value,
            });
        }
        let region_count = regions.len();
        surface.attach_overlay(&RegionOverlay { regions });
        self.overlay_attached = true;

        surface.attach_legend(&LegendModel {
            title: color::legend_title(metric.kind),
            entries: color::legend_entries(metric.kind),
        });
        self.legend_attached = true;

        let show_years = auxiliary_controls_visible(metric.kind);
        if show_years {
            surface.set_year_control(true, &years, year);
        } else {
            surface.set_year_control(false, &[], None);
        }

        self.resident = Some((metric.dataset_ref, dataset));
        self.selection = Some(Selection {
            metric: metric.clone(),
            year,
        });
        self.phase = Phase::Rendered;
        debug!(
            metric = metric.id,
            ?year,
            regions = region_count,
            "render transaction applied"
        );
    }
}

/// Tooltip body: region name, metric label, formatted value.
fn tooltip_text(
    name: &str,
    metric: &ResolvedMetric,
    value: Option<f64>,
    year: Option<u16>,
) -> String {
    let formatted = match value {
        Some(v) => format_value(v, metric.kind),
        None => "no data".to_string(),
    };
    match (metric.kind, year) {
        (ValueKind::Density, Some(y)) => {
            format!("{name}\n{} ({y}): {formatted}", metric.label)
        }
        _ => format!("{name}\n{}: {formatted}", metric.label),
    }
}
