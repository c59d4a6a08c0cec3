use crate::router::guard::Acceso;

/// Rutas de la aplicación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    Registro,
    Reserva,
    Dashboard,
    DashboardAdmin,
    DashboardRecepcion,
    AdminClientes,
    AdminEmpleados,
    AdminReservas,
}

/// Tabla estática path → ruta; se define una vez y no se muta
const TABLA: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/login", Route::Login),
    ("/registro", Route::Registro),
    ("/reserva", Route::Reserva),
    ("/dashboard", Route::Dashboard),
    ("/dashboard/admin", Route::DashboardAdmin),
    ("/dashboard/recepcionista", Route::DashboardRecepcion),
    ("/admin/clientes", Route::AdminClientes),
    ("/admin/empleados", Route::AdminEmpleados),
    ("/admin/reservas", Route::AdminReservas),
];

impl Route {
    /// Parsear un pathname. Las rutas informativas viejas (/nosotros,
    /// /contactos) y cualquier path desconocido caen al home.
    pub fn parse(path: &str) -> Route {
        let recortado = path.trim_end_matches('/');
        let path = if recortado.is_empty() { "/" } else { recortado };

        TABLA
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::Home)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Registro => "/registro",
            Route::Reserva => "/reserva",
            Route::Dashboard => "/dashboard",
            Route::DashboardAdmin => "/dashboard/admin",
            Route::DashboardRecepcion => "/dashboard/recepcionista",
            Route::AdminClientes => "/admin/clientes",
            Route::AdminEmpleados => "/admin/empleados",
            Route::AdminReservas => "/admin/reservas",
        }
    }

    /// Requisito de acceso del grupo al que pertenece la ruta
    pub fn acceso(&self) -> Acceso {
        match self {
            Route::Home | Route::Login | Route::Registro | Route::Reserva => Acceso::Publico,
            Route::Dashboard => Acceso::Autenticado,
            Route::DashboardRecepcion => Acceso::Recepcion,
            Route::DashboardAdmin
            | Route::AdminClientes
            | Route::AdminEmpleados
            | Route::AdminReservas => Acceso::Gerencia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cubre_toda_la_tabla() {
        for (path, route) in TABLA {
            assert_eq!(Route::parse(path), *route, "path {}", path);
        }
    }

    #[test]
    fn parse_y_path_son_inversos() {
        for (_, route) in TABLA {
            assert_eq!(Route::parse(route.path()), *route);
        }
    }

    #[test]
    fn rutas_viejas_caen_al_home() {
        assert_eq!(Route::parse("/nosotros"), Route::Home);
        assert_eq!(Route::parse("/contactos"), Route::Home);
    }

    #[test]
    fn paths_desconocidos_caen_al_home() {
        assert_eq!(Route::parse("/no-existe"), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn tolera_barra_final() {
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/admin/clientes/"), Route::AdminClientes);
    }

    #[test]
    fn acceso_por_grupo() {
        assert_eq!(Route::Home.acceso(), Acceso::Publico);
        assert_eq!(Route::Reserva.acceso(), Acceso::Publico);
        assert_eq!(Route::Dashboard.acceso(), Acceso::Autenticado);
        assert_eq!(Route::DashboardRecepcion.acceso(), Acceso::Recepcion);
        assert_eq!(Route::AdminClientes.acceso(), Acceso::Gerencia);
        assert_eq!(Route::DashboardAdmin.acceso(), Acceso::Gerencia);
    }
}
