use anyhow::{bail, Context, Result};
use serde::Serialize;
use trigon::geom2::{point_in_triangle_closed_tri, point_in_triangle_strict_tri};
use trigon::{Circle, Triangle, Vec2};

/// Parse `"X,Y"` into a point.
pub fn parse_point(s: &str) -> Result<Vec2<f64>> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("point `{s}` must be `X,Y`"))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in `{s}`"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in `{s}`"))?;
    if !(x.is_finite() && y.is_finite()) {
        bail!("point `{s}` is not finite");
    }
    Ok(Vec2::new(x, y))
}

#[derive(Debug, Serialize)]
pub struct CircleReport {
    pub center: [f64; 2],
    pub radius: f64,
}

impl From<Circle> for CircleReport {
    fn from(c: Circle) -> Self {
        Self {
            center: xy(c.center),
            radius: c.radius,
        }
    }
}

/// Everything a triangle knows about itself.
#[derive(Debug, Serialize)]
pub struct CentersReport {
    pub vertices: [[f64; 2]; 3],
    pub sides: [f64; 3],
    pub cosines: Option<[f64; 3]>,
    pub degenerate: bool,
    pub area: f64,
    pub circumcircle: Option<CircleReport>,
    pub incircle: Option<CircleReport>,
    pub incenter: Option<[f64; 2]>,
    pub centroid: Option<[f64; 2]>,
    pub circumcenter: Option<[f64; 2]>,
    pub orthocenter: Option<[f64; 2]>,
}

impl CentersReport {
    pub fn new(t: &Triangle) -> Self {
        let [p1, p2, p3] = t.vertices();
        // cosines are NaN on coincident vertices; JSON has no NaN
        let cosines = Some(t.cosines()).filter(|c| c.iter().all(|v| v.is_finite()));
        Self {
            vertices: [xy(p1), xy(p2), xy(p3)],
            sides: t.sides(),
            cosines,
            degenerate: t.is_degenerate(),
            area: t.area(),
            circumcircle: t.circumcircle().map(Into::into),
            incircle: t.incircle().map(Into::into),
            incenter: t.incenter().map(xy),
            centroid: t.centroid().map(xy),
            circumcenter: t.circumcenter().map(xy),
            orthocenter: t.orthocenter().map(xy),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocateReport {
    pub point: [f64; 2],
    pub barycentric: Option<[f64; 3]>,
    pub inside_closed: bool,
    pub inside_strict: bool,
}

impl LocateReport {
    pub fn new(t: &Triangle, p: Vec2<f64>) -> Self {
        let bary = t.barycentric(p);
        let barycentric = if bary.iter().all(|v| v.is_finite()) {
            Some([bary.x, bary.y, bary.z])
        } else {
            None
        };
        Self {
            point: xy(p),
            barycentric,
            inside_closed: point_in_triangle_closed_tri(p, t),
            inside_strict: point_in_triangle_strict_tri(p, t),
        }
    }
}

#[inline]
fn xy(p: Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}
