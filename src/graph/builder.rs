//! Region graph construction.
//!
//! One pass registers every region the options call for, a second connects
//! them under their guards, and a third attaches the checks. Per-class
//! regions come from a single loop over the class set rather than one block
//! per class.

use log::{debug, info};

use crate::catalog::locations::{
    area_checks, chest_slot_checks, class_checks, class_victory_location, global_shop_checks,
    regional_shop_checks,
};
use crate::catalog::{
    Area, ClassName, Kingdom, LocationCatalog, TokenGroup, PROGRESSIVE_REGION, VICTORY,
    VICTORY_LOCATION,
};
use crate::core::{GenerationError, LogicConfig, ShopSanity};
use crate::goal::{completion_predicate, goal_predicate};
use crate::logic::Predicate;
use crate::order::OrderMap;

use super::region::{Graph, Location};
use super::search::ORIGIN;

/// Region holding the shared shop checks.
pub const SHOPS: &str = "Shops";

/// Name of the sub-region for checks earned as `class` in `base`.
#[must_use]
pub fn class_region_name(base: &str, class: ClassName) -> String {
    format!("{base} - {}", class.name())
}

/// Build the region graph for a configuration and a resolved route order.
///
/// `order` must already be solved when the options enforce a route order.
pub fn build_graph(config: &LogicConfig, order: &OrderMap) -> Result<Graph, GenerationError> {
    GraphBuilder::new(config, order).build()
}

struct GraphBuilder<'a> {
    config: &'a LogicConfig,
    catalog: LocationCatalog,
    graph: Graph,
}

impl<'a> GraphBuilder<'a> {
    fn new(config: &'a LogicConfig, order: &OrderMap) -> Self {
        // Excluded kingdoms never cover a slot, whatever the caller's map says.
        let mut order = order.clone();
        for kingdom in &config.excluded_kingdoms {
            order.set(*kingdom, OrderMap::EXCLUDED);
        }

        Self {
            config,
            catalog: LocationCatalog::new(),
            graph: Graph::new(order),
        }
    }

    fn build(mut self) -> Result<Graph, GenerationError> {
        self.add_regions()?;
        self.connect_regions()?;
        self.add_locations()?;
        self.graph.set_completion(completion_predicate());

        info!(
            "built region graph: {} regions, {} transitions, {} checks",
            self.graph.region_count(),
            self.graph.transitions().count(),
            self.graph.check_count()
        );
        Ok(self.graph)
    }

    // Areas present in this seed.
    fn areas(&self) -> impl Iterator<Item = Area> + '_ {
        Area::all().filter(|area| match area {
            Area::Outskirts => true,
            Area::Kingdom(kingdom) => self.config.is_kingdom_included(*kingdom),
        })
    }

    // Areas whose class checks come from `checks_per_class`.
    fn class_areas(&self) -> impl Iterator<Item = Area> + '_ {
        self.areas()
            .filter(|area| *area != Area::Kingdom(Kingdom::MoonlitPinnacle))
    }

    fn add_regions(&mut self) -> Result<(), GenerationError> {
        self.graph.add_region(ORIGIN)?;

        let areas: Vec<Area> = self.areas().collect();
        for area in &areas {
            self.graph.add_region(area.name())?;
        }

        for area in self.class_areas().collect::<Vec<_>>() {
            for class in self.config.checked_classes().collect::<Vec<_>>() {
                self.graph.add_region(class_region_name(area.name(), class))?;
            }
        }

        for class in self.config.pinnacle_classes() {
            self.graph
                .add_region(class_region_name(Kingdom::MoonlitPinnacle.name(), class))?;
        }

        if self.config.shop_sanity == ShopSanity::Global {
            self.graph.add_region(SHOPS)?;
        }

        debug!("registered {} regions", self.graph.region_count());
        Ok(())
    }

    fn connect_regions(&mut self) -> Result<(), GenerationError> {
        let outskirts = Area::Outskirts.name();

        self.graph.connect(
            ORIGIN,
            outskirts,
            format!("{ORIGIN} to {outskirts}"),
            Predicate::Always,
        )?;

        for kingdom in Kingdom::OPTIONAL {
            if !self.config.is_kingdom_included(kingdom) {
                continue;
            }
            let guard = self.kingdom_guard(kingdom)?;
            debug!("{kingdom} entrance: {guard:?}");
            self.graph.connect(
                outskirts,
                kingdom.name(),
                format!("{outskirts} to {kingdom}"),
                guard,
            )?;
        }

        let keep = Kingdom::PaleKeep.name();
        let pinnacle = Kingdom::MoonlitPinnacle.name();
        let keep_guard = self.keep_guard();
        let pinnacle_guard = self.pinnacle_guard();
        self.graph
            .connect(outskirts, keep, format!("{outskirts} to {keep}"), keep_guard)?;
        self.graph
            .connect(keep, pinnacle, format!("{keep} to {pinnacle}"), pinnacle_guard)?;

        for area in self.class_areas().collect::<Vec<_>>() {
            for class in self.config.checked_classes().collect::<Vec<_>>() {
                let region = class_region_name(area.name(), class);
                let guard = self.class_guard(class);
                self.graph.connect(area.name(), &region, region.clone(), guard)?;
            }
        }

        for class in self.config.pinnacle_classes() {
            let region = class_region_name(pinnacle, class);
            let guard = self.class_guard(class);
            self.graph.connect(pinnacle, &region, region.clone(), guard)?;
        }

        if self.config.shop_sanity == ShopSanity::Global {
            for kingdom in Kingdom::with_class_checks() {
                if self.config.is_kingdom_included(kingdom) {
                    self.graph.connect(
                        kingdom.name(),
                        SHOPS,
                        format!("{kingdom} to Shop"),
                        Predicate::Always,
                    )?;
                }
            }
        }

        Ok(())
    }

    fn kingdom_guard(&self, kingdom: Kingdom) -> Result<Predicate, GenerationError> {
        let ordered = self.config.ordering_enforced();
        let slot = if ordered {
            let order = self.graph.order();
            order.slot(kingdom).ok_or_else(|| {
                GenerationError::InvalidOptions(format!("{kingdom} has no route slot in {order}"))
            })?
        } else {
            0
        };

        let mut parts = Vec::new();
        if self.config.item_gated() {
            parts.push(Predicate::has(kingdom.name()));
            if ordered {
                parts.push(Predicate::PriorSlotCoverage(slot));
            }
        }
        if self.config.progressive_regions {
            let threshold = if ordered { u32::from(slot) } else { 1 };
            parts.push(Predicate::count_at_least(PROGRESSIVE_REGION, threshold));
        }
        Ok(Predicate::all(parts))
    }

    fn keep_guard(&self) -> Predicate {
        let max = self.config.max_kingdoms_per_run;
        let mut parts = Vec::new();

        if self.config.item_gated() {
            parts.push(Predicate::has(Kingdom::PaleKeep.name()));
            if self.config.ordering_enforced() {
                parts.push(Predicate::PriorSlotCoverage(max + 1));
            } else {
                parts.push(Predicate::group_distinct(TokenGroup::Kingdoms, u32::from(max)));
            }
        }
        if self.config.progressive_regions {
            parts.push(Predicate::count_at_least(PROGRESSIVE_REGION, u32::from(max) + 1));
        }
        Predicate::all(parts)
    }

    fn pinnacle_guard(&self) -> Predicate {
        let max = u32::from(self.config.max_kingdoms_per_run);
        let mut parts = Vec::new();

        if self.config.item_gated() {
            parts.push(Predicate::has(Kingdom::MoonlitPinnacle.name()));
        }
        if self.config.progressive_regions {
            parts.push(Predicate::count_at_least(PROGRESSIVE_REGION, max + 2));
        }
        Predicate::all(parts)
    }

    fn class_guard(&self, class: ClassName) -> Predicate {
        if self.config.class_sanity {
            Predicate::has(class.name())
        } else {
            Predicate::Always
        }
    }

    fn add_locations(&mut self) -> Result<(), GenerationError> {
        let areas: Vec<Area> = self.areas().collect();

        for area in &areas {
            self.place(area.name(), area_checks(*area))?;
        }

        for area in self.class_areas().collect::<Vec<_>>() {
            for class in self.config.checked_classes().collect::<Vec<_>>() {
                let region = class_region_name(area.name(), class);
                self.place(&region, class_checks(area, class))?;
            }
        }

        let pinnacle = Area::Kingdom(Kingdom::MoonlitPinnacle);
        let victories = self.config.goal_condition.requires_class_victories();
        for class in self.config.pinnacle_classes() {
            let region = self.graph.region_id(&class_region_name(pinnacle.name(), class))?;
            let name = class_victory_location(class);
            let id = self.catalog.id(&name);
            let mut location = Location::new(name, id, region);
            if victories {
                location = location.with_locked_item(class.victory_token());
            }
            self.graph.add_location(location)?;
        }

        if self.config.checks_per_item_in_chest {
            for area in &areas {
                self.place(area.name(), chest_slot_checks(*area))?;
            }
        }

        match self.config.shop_sanity {
            ShopSanity::None => {}
            ShopSanity::Global => self.place(SHOPS, global_shop_checks())?,
            ShopSanity::Regional => {
                for area in &areas {
                    if let Area::Kingdom(kingdom) = area {
                        self.place(kingdom.name(), regional_shop_checks(*kingdom))?;
                    }
                }
            }
        }

        let region = self.graph.region_id(pinnacle.name())?;
        self.graph.add_location(
            Location::new(VICTORY_LOCATION, None, region)
                .with_access(goal_predicate(self.config))
                .with_locked_item(VICTORY),
        )?;

        Ok(())
    }

    fn place(&mut self, region: &str, names: Vec<String>) -> Result<(), GenerationError> {
        let region = self.graph.region_id(region)?;
        for name in names {
            let id = self.catalog.id(&name);
            self.graph.add_location(Location::new(name, id, region))?;
        }
        Ok(())
    }
}
