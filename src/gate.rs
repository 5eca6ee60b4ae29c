/// Puerta de acceso por secreto compartido. Solo persiste el resultado
/// de la comparación; el valor introducido nunca se guarda aquí.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unchallenged,
    Denied,
    Granted,
}

pub struct AccessGate {
    secret: String,
    state: GateState,
}

impl AccessGate {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            state: GateState::Unchallenged,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_granted(&self) -> bool {
        self.state == GateState::Granted
    }

    /// Compara y transiciona. Una vez concedido, queda concedido
    /// para toda la sesión; no se vuelve a pedir el secreto.
    pub fn try_unlock(&mut self, entered: &str) -> bool {
        if self.state == GateState::Granted {
            return true;
        }
        self.state = if entered == self.secret {
            GateState::Granted
        } else {
            GateState::Denied
        };
        self.is_granted()
    }
}
